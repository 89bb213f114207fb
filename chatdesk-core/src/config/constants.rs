/// Default endpoint constants to avoid hardcoding throughout the codebase
pub mod endpoints {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    pub mod domain {
        pub const CHAT: &str = "/api/chat";
        pub const FILES_LIST: &str = "/api/files/list";
        pub const FILES_UPLOAD: &str = "/api/files/upload";
    }

    pub mod persona {
        pub const CHAT: &str = "/chat";
    }

    pub const HEALTH: &str = "/health";
}

/// Request defaults
pub mod defaults {
    pub const TIMEOUT_SECS: u64 = 60;
    pub const MAX_LIST_RESULTS: u32 = 100;
    pub const UPLOAD_FIELD: &str = "file";
}

/// Message role constants
pub mod message_roles {
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// Domain tags understood by the domain-aware backend
pub mod domains {
    pub const AUTO: &str = "auto";
    pub const HR: &str = "hr";
    pub const LEGAL: &str = "legal";
    pub const L1: &str = "l1";
    pub const L2: &str = "l2";

    pub const ALL: &[&str] = &[AUTO, HR, LEGAL, L1, L2];
}

/// Environment variable names
pub mod env_vars {
    pub const BASE_URL: &str = "CHATDESK_BASE_URL";
    pub const API_KEY: &str = "CHATDESK_API_KEY";
}

/// Configuration file locations
pub mod config_files {
    pub const FILE_NAME: &str = "chatdesk.toml";
    pub const DIR_NAME: &str = ".chatdesk";
}

/// Presentation strings
pub mod display {
    pub const ERROR_PREFIX: &str = "Error: ";
}
