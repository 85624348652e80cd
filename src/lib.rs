pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod auth;
    pub mod collections;
    pub mod directory;
    pub mod fallback;
    pub mod health;
    pub mod settings;

    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod models {
    pub mod admin;
    pub mod badge;
    pub mod directory;
    pub mod inventory;
    pub mod rank;
    pub mod user;
    pub mod wanted;
}

pub mod security {
    pub mod access_gate;
    pub mod login;
    pub mod session;
}

pub mod stores {
    pub mod collection;
    pub mod local_store;
}

pub mod utils {
    pub mod search;
    pub mod time;
}

pub mod validation {
    pub mod forms;
    pub mod request;
}
