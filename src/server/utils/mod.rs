pub mod alloc_utils;
