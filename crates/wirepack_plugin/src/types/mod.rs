pub mod serialize_args;
