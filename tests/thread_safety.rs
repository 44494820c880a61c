use caseless_dict::CaseInsensitiveDict;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn dict_can_be_shared_behind_a_mutex() {
    let dict = Arc::new(Mutex::new(CaseInsensitiveDict::<String, usize>::new()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let dict = Arc::clone(&dict);
        handles.push(thread::spawn(move || {
            let key = if i % 2 == 0 { "SHARED" } else { "shared" };
            let mut guard = dict.lock().expect("lock poisoned");
            *guard.get_or_insert_with(key, || 0) += 1;
            guard.insert(format!("Worker-{i}"), i);
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }

    let dict = dict.lock().expect("lock poisoned");
    assert_eq!(dict.get("Shared"), Some(&8));
    assert_eq!(dict.len(), 9);
    for i in 0..8 {
        assert_eq!(dict.get(format!("worker-{i}")), Some(&i));
    }
}

#[test]
fn dict_can_move_between_threads() {
    let mut dict = CaseInsensitiveDict::<String, String>::new();
    dict.insert("Origin", "https://example.com".to_string());

    let dict = thread::spawn(move || {
        dict.insert("ORIGIN", "https://moved.example".to_string());
        dict
    })
    .join()
    .expect("thread panic");

    assert_eq!(dict.get("origin").map(String::as_str), Some("https://moved.example"));
}
