//! Service descriptor construction for the landing page grid.
//!
//! DESIGN
//! ======
//! Descriptors are rebuilt from static data on every render: the closed set of
//! known services, their bundled icons, the request origin, the tenant path
//! segment and (when known) the gateway availability set. Nothing here can
//! fail; odd inputs only change which links come out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

/// Gateway name under which the pipeline UI is registered.
pub const AETHER_UI: &str = "kernel-ui";

const GATHER_ICON: &str = "/icons/gather.svg";
const KIBANA_ICON: &str = "/icons/kibana.svg";
const AETHER_ICON: &str = "/icons/aether.svg";

/// The closed set of services the portal knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceName {
    Gather,
    Kibana,
    Aether,
    Kernel,
    Odk,
}

impl ServiceName {
    /// Every known service in grid order.
    pub const ALL: [ServiceName; 5] = [Self::Gather, Self::Kibana, Self::Aether, Self::Kernel, Self::Odk];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gather => "gather",
            Self::Kibana => "kibana",
            Self::Aether => "aether",
            Self::Kernel => "kernel",
            Self::Odk => "odk",
        }
    }

    /// Default English description, used when the catalog has no entry.
    #[must_use]
    pub fn about(self) -> &'static str {
        match self {
            Self::Gather => {
                "With Gather you can create and manage surveys and surveyors, monitor the progress of \
                 data collection, and explore, mask and download your data as it comes in."
            }
            Self::Kibana => {
                "Send your data to Kibana and create various types of charts, tables and maps for \
                 visualizing, analyzing, and exploring the data."
            }
            Self::Aether => {
                "Aether enables you to extract, mask and publish data to other platforms by creating a \
                 pipeline to map your existing data structure to your desired output."
            }
            Self::Kernel => "The Aether Kernel provides common functionality, such as logging and authentication",
            Self::Odk => {
                "Aether Core modules provide generally useful components for data input and application \
                 communication. The ODK module can be used to, for example, for serving XForms to ODK Collect."
            }
        }
    }

    /// Bundled icon path, if the service has one.
    #[must_use]
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::Gather => Some(GATHER_ICON),
            Self::Kibana => Some(KIBANA_ICON),
            Self::Aether => Some(AETHER_ICON),
            Self::Kernel | Self::Odk => None,
        }
    }

    /// Whether `available` marks this service as enabled.
    ///
    /// The pipeline UI is registered in the gateway as [`AETHER_UI`], so either
    /// name counts for [`ServiceName::Aether`].
    #[must_use]
    pub fn is_available<S: AsRef<str>>(self, available: &[S]) -> bool {
        available.iter().any(|name| {
            let name = name.as_ref();
            name == self.as_str() || (self == Self::Aether && name == AETHER_UI)
        })
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an identifier outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownService(pub String);

impl fmt::Display for UnknownService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown service '{}'", self.0)
    }
}

impl std::error::Error for UnknownService {}

impl FromStr for ServiceName {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_owned()))
    }
}

/// One tile on the landing page.
///
/// An empty `name` marks a layout spacer with no link, icon or caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub about: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub link: String,
}

impl ServiceDescriptor {
    fn new(name: ServiceName, link: String) -> Self {
        Self {
            name: name.as_str().to_owned(),
            about: name.about().to_owned(),
            icon: name.icon().map(str::to_owned),
            link,
        }
    }

    /// A blank grid cell.
    #[must_use]
    pub fn spacer() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_spacer(&self) -> bool {
        self.name.is_empty()
    }
}

/// The full fixed tile layout, regardless of what the gateway exposes.
///
/// Order: gather, kibana, spacer, aether, kernel, odk. Kernel and ODK are not
/// tenant scoped and always link straight off the origin.
pub fn all_services(tenant: &str, origin: &str) -> Vec<ServiceDescriptor> {
    let scoped = Links::new(origin, tenant);
    let shared = Links::new(origin, "");
    vec![
        ServiceDescriptor::new(ServiceName::Gather, scoped.to("gather")),
        ServiceDescriptor::new(ServiceName::Kibana, scoped.to("kibana/kibana-app")),
        ServiceDescriptor::spacer(),
        ServiceDescriptor::new(ServiceName::Aether, scoped.to("aether")),
        ServiceDescriptor::new(ServiceName::Kernel, shared.to("kernel")),
        ServiceDescriptor::new(ServiceName::Odk, shared.to("odk")),
    ]
}

/// Tiles for the services present in `available`, in grid order.
///
/// Every link is tenant scoped. The pipeline tile points at the gateway's
/// [`AETHER_UI`] route.
pub fn available_services<S: AsRef<str>>(available: &[S], tenant: &str, origin: &str) -> Vec<ServiceDescriptor> {
    let links = Links::new(origin, tenant);
    ServiceName::ALL
        .into_iter()
        .filter(|name| name.is_available(available))
        .map(|name| {
            let path = match name {
                ServiceName::Kibana => "kibana/kibana-app",
                ServiceName::Aether => AETHER_UI,
                other => other.as_str(),
            };
            ServiceDescriptor::new(name, links.to(path))
        })
        .collect()
}

/// Link prefix for one origin/tenant pair.
struct Links {
    prefix: String,
}

impl Links {
    fn new(origin: &str, tenant: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let tenant = tenant.trim_matches('/');
        let prefix = if tenant.is_empty() { format!("{origin}/") } else { format!("{origin}/{tenant}/") };
        Self { prefix }
    }

    fn to(&self, path: &str) -> String {
        format!("{}{path}", self.prefix)
    }
}
