pub mod passes;

pub mod requests {
    pub mod job_request;
}
