//! Names for the resources of an infrastructure stack.
//!
//! A [`StackManifest`] lists logical resources and their kinds; naming a
//! stack produces one identifier per resource. Building, wiring or
//! provisioning the resources is left to the provisioning tool.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::guid::{Guid, GuidGenerator};

/// Kinds of resource the microservice stack declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Virtual private network.
    Vpc,
    /// Autoscaling group of compute instances.
    AutoScalingGroup,
    /// Classic load balancer.
    LoadBalancer,
    /// Relational database instance.
    Database,
    /// CDN distribution.
    Distribution,
    /// Object storage bucket.
    Bucket,
    /// Single compute instance.
    Instance,
    /// Serverless function.
    Function,
}

impl ResourceKind {
    /// Prefix used when a resource does not override it.
    #[must_use]
    pub fn default_prefix(self) -> &'static str {
        match self {
            Self::Vpc => "VPC-",
            Self::AutoScalingGroup => "ASG-",
            Self::LoadBalancer => "ELB-",
            Self::Database => "RDS-",
            Self::Distribution => "CDN-",
            Self::Bucket => "S3-",
            Self::Instance => "EC2-",
            Self::Function => "FN-",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
            Self::AutoScalingGroup => "auto_scaling_group",
            Self::LoadBalancer => "load_balancer",
            Self::Database => "database",
            Self::Distribution => "distribution",
            Self::Bucket => "bucket",
            Self::Instance => "instance",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logical resource in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Stable id of the resource within the stack.
    pub logical_id: String,
    /// Resource kind.
    pub kind: ResourceKind,
    /// Overrides the kind's default prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl ResourceSpec {
    fn new(logical_id: &str, kind: ResourceKind) -> Self {
        Self { logical_id: logical_id.to_string(), kind, prefix: None }
    }

    /// Prefix the resource's identifier is generated with.
    #[must_use]
    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_else(|| self.kind.default_prefix())
    }
}

/// Ordered list of resources to name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackManifest {
    /// Stack name.
    pub name: String,
    /// Resources, named in this order.
    pub resources: Vec<ResourceSpec>,
}

impl StackManifest {
    /// The microservice stack: network, autoscaling web tier behind a load
    /// balancer, database, CDN over a static bucket, archive bucket,
    /// standalone instance, and the sync and backup functions.
    #[must_use]
    pub fn microservice() -> Self {
        use ResourceKind::{
            AutoScalingGroup, Bucket, Database, Distribution, Function, Instance, LoadBalancer,
            Vpc,
        };

        Self {
            name: "microservice".to_string(),
            resources: vec![
                ResourceSpec::new("vpc", Vpc),
                ResourceSpec::new("asg", AutoScalingGroup),
                ResourceSpec::new("elb", LoadBalancer),
                ResourceSpec::new("rds", Database),
                ResourceSpec::new("distribution", Distribution),
                ResourceSpec::new("static_files", Bucket),
                ResourceSpec::new("archive_storage", Bucket),
                ResourceSpec::new("ec2", Instance),
                ResourceSpec::new("sync_function", Function),
                ResourceSpec::new("backup_function", Function),
            ],
        }
    }

    /// Parses a manifest from YAML text. `origin` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid manifest or repeats a
    /// logical id.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let manifest: Self = serde_yaml::from_str(text)
            .map_err(|source| ConfigError::ManifestParse { path: origin.to_path_buf(), source })?;
        manifest.check_unique_ids()?;
        Ok(manifest)
    }

    /// Reads a manifest from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::ManifestRead { path: path.to_path_buf(), source })?;
        Self::from_yaml(&text, path)
    }

    fn check_unique_ids(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(resource.logical_id.as_str()) {
                return Err(ConfigError::DuplicateLogicalId(resource.logical_id.clone()));
            }
        }
        Ok(())
    }
}

/// A resource paired with its generated name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceName {
    /// Logical id from the manifest.
    pub logical_id: String,
    /// Resource kind.
    pub kind: ResourceKind,
    /// Generated identifier.
    pub name: Guid,
}

/// Generates one identifier per resource, in manifest order.
#[must_use]
pub fn name_stack(generator: &GuidGenerator<'_>, manifest: &StackManifest) -> Vec<ResourceName> {
    let names: Vec<ResourceName> = manifest
        .resources
        .iter()
        .map(|resource| ResourceName {
            logical_id: resource.logical_id.clone(),
            kind: resource.kind,
            name: generator.generate(resource.effective_prefix()),
        })
        .collect();
    tracing::info!(stack = %manifest.name, count = names.len(), "named stack resources");
    names
}
