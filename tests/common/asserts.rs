#![allow(dead_code)]

use caseless_dict::{CaseInsensitiveDict, DictError, DictResult};
use std::fmt::Debug;

pub fn keys_of<V>(dict: &CaseInsensitiveDict<String, V>) -> Vec<&str> {
    dict.keys().map(String::as_str).collect()
}

pub fn assert_keys<V>(dict: &CaseInsensitiveDict<String, V>, expected: &[&str]) {
    assert_eq!(keys_of(dict), expected, "unexpected key order");
}

pub fn assert_key_not_found<T: Debug>(result: DictResult<T>) {
    match result {
        Err(DictError::KeyNotFound) => {}
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}

pub fn assert_empty_collection<T: Debug>(result: DictResult<T>) {
    match result {
        Err(DictError::EmptyCollection) => {}
        other => panic!("expected EmptyCollection, got {:?}", other),
    }
}
