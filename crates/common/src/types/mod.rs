use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Payload served at `/`.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
    pub docs: &'static str,
    pub openapi: &'static str,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            message: "Welcome to the Medspa API",
            docs: "/docs",
            openapi: "/api-docs/openapi.json",
        }
    }
}
