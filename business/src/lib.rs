pub mod application {
    pub mod short_link {
        pub mod get_link;
        pub mod resolve;
    }
    pub mod shopping_list {
        pub mod aggregate;
        pub mod download;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod short_link {
        pub mod codec;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_link;
            pub mod resolve;
        }
    }
    pub mod shopping_list {
        pub mod document;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod aggregate;
            pub mod download;
        }
    }
    pub mod user {
        pub mod repository;
    }
}
