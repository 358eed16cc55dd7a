pub mod application {
    pub mod auth {
        pub mod login;
    }
    pub mod produto {
        pub mod create;
        pub mod delete;
        pub mod filter_allowed;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
        pub mod update_picture;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod login;
        }
    }
    pub mod produto {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod filter_allowed;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
            pub mod update_picture;
        }
    }
}
