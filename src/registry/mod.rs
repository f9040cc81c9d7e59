//! Online domain availability checks
//!
//! Best-effort probes against the upstream integration registry, the Python
//! package index, and the community plugin registry. A network failure is
//! never fatal here: it degrades the check to "inconclusive" and the caller
//! decides what to do with confirmed conflicts.

use crate::system::System;
use anyhow::Result;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Default base URL for core integration manifests
const DEFAULT_CORE_REGISTRY_BASE: &str =
    "https://raw.githubusercontent.com/home-assistant/core/dev/homeassistant/components";

/// Default base URL for the package index JSON API
const DEFAULT_PACKAGE_INDEX_BASE: &str = "https://pypi.org/pypi";

/// Default URL of the community default-integration listing
const DEFAULT_COMMUNITY_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/hacs/default/master/integration";

/// Per-request timeout; availability checks must never stall the run
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Registry endpoint configuration
#[derive(Debug, Clone)]
pub struct RegistryEndpoints {
    pub core_registry_base: String,
    pub package_index_base: String,
    pub community_registry_url: String,
}

impl RegistryEndpoints {
    /// Build endpoints from defaults, honoring `BPINIT_*` overrides
    #[must_use]
    pub fn from_env(system: &dyn System) -> Self {
        Self {
            core_registry_base: system
                .env_var("BPINIT_CORE_REGISTRY_BASE")
                .unwrap_or_else(|_| DEFAULT_CORE_REGISTRY_BASE.to_owned()),
            package_index_base: system
                .env_var("BPINIT_PACKAGE_INDEX_BASE")
                .unwrap_or_else(|_| DEFAULT_PACKAGE_INDEX_BASE.to_owned()),
            community_registry_url: system
                .env_var("BPINIT_COMMUNITY_REGISTRY_URL")
                .unwrap_or_else(|_| DEFAULT_COMMUNITY_REGISTRY_URL.to_owned()),
        }
    }
}

/// Outcome of all availability probes for one domain
#[derive(Debug, Default)]
pub struct AvailabilityReport {
    /// Confirmed conflicts: the name is definitely taken somewhere
    pub conflicts: Vec<String>,
    /// Inconclusive probes, reported as warnings
    pub warnings: Vec<String>,
}

impl AvailabilityReport {
    /// Whether no conflict was confirmed
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Outcome of a single probe
enum Probe {
    Found,
    NotFound,
    Inconclusive(String),
}

/// Blocking HTTP client for the registry probes
pub struct RegistryClient {
    client: Client,
    endpoints: RegistryEndpoints,
}

impl RegistryClient {
    /// Create a client for the given endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoints: RegistryEndpoints) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("bpinit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoints })
    }

    /// Run every availability probe for `domain`
    #[must_use]
    pub fn check_domain(&self, domain: &str) -> AvailabilityReport {
        let mut report = AvailabilityReport::default();

        self.check_core_registry(domain, &mut report);
        self.check_package_index(domain, &mut report);
        self.check_community_registry(domain, &mut report);

        report
    }

    /// Probe the core integration registry for an existing manifest
    fn check_core_registry(&self, domain: &str, report: &mut AvailabilityReport) {
        let url = format!(
            "{}/{domain}/manifest.json",
            self.endpoints.core_registry_base
        );
        match self.probe(&url) {
            Probe::Found => report.conflicts.push(format!(
                "a core integration named '{domain}' already exists"
            )),
            Probe::NotFound => debug!("Core registry has no '{domain}'"),
            Probe::Inconclusive(reason) => report
                .warnings
                .push(format!("core registry check inconclusive: {reason}")),
        }
    }

    /// Probe the package index for every derived package-name candidate
    fn check_package_index(&self, domain: &str, report: &mut AvailabilityReport) {
        for candidate in package_name_candidates(domain) {
            let url = format!("{}/{candidate}/json", self.endpoints.package_index_base);
            match self.probe(&url) {
                Probe::Found => report.conflicts.push(format!(
                    "the package index already has a project named '{candidate}'"
                )),
                Probe::NotFound => debug!("Package index has no '{candidate}'"),
                Probe::Inconclusive(reason) => report
                    .warnings
                    .push(format!("package index check inconclusive: {reason}")),
            }
        }
    }

    /// Scan the community default-integration listing for the domain
    fn check_community_registry(&self, domain: &str, report: &mut AvailabilityReport) {
        let url = &self.endpoints.community_registry_url;
        let body = match self.client.get(url).send() {
            Ok(response) if response.status().is_success() => match response.text() {
                Ok(body) => body,
                Err(err) => {
                    report
                        .warnings
                        .push(format!("community registry check inconclusive: {err}"));
                    return;
                }
            },
            Ok(response) => {
                report.warnings.push(format!(
                    "community registry check inconclusive: HTTP {}",
                    response.status()
                ));
                return;
            }
            Err(err) => {
                report
                    .warnings
                    .push(format!("community registry check inconclusive: {err}"));
                return;
            }
        };

        // The listing is a JSON array of owner/repo slugs
        let entries: Vec<String> = match serde_json::from_str(&body) {
            Ok(entries) => entries,
            Err(err) => {
                report.warnings.push(format!(
                    "community registry listing unparsable: {err}"
                ));
                return;
            }
        };

        let suffix = format!("/{domain}");
        if let Some(entry) = entries.iter().find(|e| e.ends_with(&suffix)) {
            report.conflicts.push(format!(
                "the community registry already lists '{entry}'"
            ));
        } else {
            debug!("Community registry has no '{domain}'");
        }
    }

    /// Existence probe: 2xx means found, 404 means free, anything else is
    /// inconclusive
    fn probe(&self, url: &str) -> Probe {
        match self.client.get(url).send() {
            Ok(response) if response.status().is_success() => Probe::Found,
            Ok(response) if response.status() == StatusCode::NOT_FOUND => Probe::NotFound,
            Ok(response) => Probe::Inconclusive(format!("HTTP {}", response.status())),
            Err(err) => Probe::Inconclusive(err.to_string()),
        }
    }
}

/// Package names a published integration might have claimed
fn package_name_candidates(domain: &str) -> Vec<String> {
    let mut candidates = vec![domain.to_owned()];
    let dashed = domain.replace('_', "-");
    if !candidates.contains(&dashed) {
        candidates.push(dashed);
    }
    candidates.push(format!("homeassistant-{domain}"));
    candidates.push(format!("ha-{domain}"));
    candidates
}
