pub mod register_request;
