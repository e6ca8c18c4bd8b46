// crates/gate-core/src/container.rs
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::config::{CONTAINER_OUTPUT_DIR, GateConfig};
use crate::error::Result;
use crate::max_results::MaxResults;
use crate::request::GateRequest;

/// Fully resolved `<runtime> run` command for one processor run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerInvocation {
    pub program: String,
    pub container_name: String,
    pub image: String,
    pub host_output_dir: PathBuf,
    pub mount_point: String,
    #[serde(serialize_with = "lossy")]
    pub query: OsString,
    pub max_results: MaxResults,
}

impl ContainerInvocation {
    /// `host_output_dir` must already be absolute.
    pub fn new(config: &GateConfig, request: &GateRequest, host_output_dir: &Path) -> Self {
        Self {
            program: config.runtime.clone(),
            container_name: config.container_name.clone(),
            image: config.image.clone(),
            host_output_dir: host_output_dir.to_path_buf(),
            mount_point: CONTAINER_OUTPUT_DIR.to_string(),
            query: request.query.clone(),
            max_results: request.max_results,
        }
    }

    /// `-v` value: host directory bound read-write at the mount point.
    pub fn volume_spec(&self) -> OsString {
        let mut spec = self.host_output_dir.clone().into_os_string();
        spec.push(":");
        spec.push(&self.mount_point);
        spec.push(":rw");
        spec
    }

    /// Arguments passed to the runtime, excluding the program itself.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "run".into(),
            "--rm".into(),
            "--name".into(),
            self.container_name.clone().into(),
            "-v".into(),
            self.volume_spec(),
            self.image.clone().into(),
            self.query.clone(),
            self.max_results.to_string().into(),
            self.mount_point.clone().into(),
        ]
    }

    /// Space-joined command line for logs. Not shell-quoted.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args().iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Pretty JSON used by `--dry-run`.
    ///
    /// # Errors
    /// Returns [`crate::GateError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let Some(obj) = value.as_object_mut() {
            let args: Vec<String> = self
                .args()
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            obj.insert("args".to_string(), args.into());
        }
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Non-UTF-8 bytes become U+FFFD in the JSON plan only; `args()` keeps them.
fn lossy<S: Serializer>(value: &OsStr, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string_lossy())
}
