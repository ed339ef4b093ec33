use serde::{Deserialize, Serialize};

/// Which of the three workshop services a process is running as.
///
/// Each kind owns exactly one entity, one database and one container; the
/// defaults below are overridable through the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Pets,
    Activities,
    Accessories,
}

impl ServiceKind {
    pub fn app_name(&self) -> &'static str {
        match self {
            Self::Pets => "Pet Service API",
            Self::Activities => "Activity Service API",
            Self::Accessories => "Accessory Service API",
        }
    }

    pub fn default_database(&self) -> &'static str {
        match self {
            Self::Pets => "petservice",
            Self::Activities => "activityservice",
            Self::Accessories => "accessoryservice",
        }
    }

    pub fn default_container(&self) -> &'static str {
        match self {
            Self::Pets => "pets",
            Self::Activities => "activities",
            Self::Accessories => "accessories",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Pets => 8000,
            Self::Activities => 8001,
            Self::Accessories => 8030,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Pets => 0,
            Self::Activities => 1,
            Self::Accessories => 2,
        }
    }
}

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Database portion of the health report.
#[derive(Serialize, Deserialize, Debug)]
pub struct DatabaseHealth {
    pub status: String,
    pub database: String,
    pub container: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
}
