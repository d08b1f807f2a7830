pub mod shared {
    pub mod core {
        pub mod interval_set;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod result_store;
    }
}

pub mod modules {
    pub mod passes {
        pub mod core {
            pub mod filter;
            pub mod pass_record;
            pub mod ports;
            pub mod satellite;
        }
        pub mod use_cases {
            pub mod access_time;
        }
        pub mod adapters {
            pub mod mappers {
                pub mod pass_row_to_pass_record;
            }
            pub mod outbound {
                pub mod in_memory_pass_source;
                pub mod json_file_pass_source;
                pub mod text_loaders;
            }
        }
    }
    pub mod bookings {
        pub mod core {
            pub mod booking;
            pub mod calendar;
            pub mod client;
            pub mod offer;
            pub mod request;
            pub mod decider {
                pub mod decide;
                pub mod decision;
            }
        }
    }
    pub mod scheduling {
        pub mod core {
            pub mod end_start;
            pub mod errors;
            pub mod orderings;
            pub mod owner_preference;
            pub mod policy;
        }
        pub mod use_cases {
            pub mod build_request;
            pub mod dispatch;
            pub mod dispatch_partitioned;
            pub mod run_simulation {
                pub mod command;
                pub mod handler;
                pub mod report;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod report_calendar {
                pub mod views;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
