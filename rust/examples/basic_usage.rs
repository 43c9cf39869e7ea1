//! Walkthrough of the OrderedMap API: basic CRUD, string keys, struct
//! payloads, cursors, and the statistics layer.

use ordmap::{Direction, OrderedMap};

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    id: u32,
    name: String,
    salary: f64,
}

fn basic_operations() {
    println!("Example 1: Basic Integer Map Operations");
    println!("=======================================");

    let mut map = OrderedMap::new();

    let keys = [5, 2, 8, 1, 9, 3, 7, 4, 6];
    println!("Inserting {} key-value pairs...", keys.len());
    for key in keys {
        map.insert(key, key * 10);
    }

    println!("Map size: {}", map.len());
    println!("Min key: {:?}, max key: {:?}", map.min_key(), map.max_key());

    println!("Contents in order:");
    for (key, value) in &map {
        println!("  {} -> {}", key, value);
    }

    map.remove(&5);
    println!("After removing 5, size: {}", map.len());
    println!();
}

fn string_keys() {
    println!("Example 2: String Keys");
    println!("======================");

    let mut departments = OrderedMap::new();
    departments.insert("engineering".to_string(), 4);
    departments.insert("marketing".to_string(), 2);
    departments.insert("sales".to_string(), 3);

    for (name, floor) in &departments {
        println!("  {} is on floor {}", name, floor);
    }
    println!();
}

fn struct_payloads() {
    println!("Example 3: Struct Payloads");
    println!("==========================");

    let mut employees = OrderedMap::new();
    employees.insert(
        1001,
        Employee {
            id: 1001,
            name: "Alice Johnson".to_string(),
            salary: 75_000.0,
        },
    );
    employees.insert(
        1002,
        Employee {
            id: 1002,
            name: "Bob Smith".to_string(),
            salary: 65_000.0,
        },
    );

    if let Some(employee) = employees.get(&1001) {
        println!("  Employee 1001: {} (${:.2})", employee.name, employee.salary);
    }

    // Give Bob a raise through the mutable accessor.
    if let Some(employee) = employees.get_mut(&1002) {
        employee.salary += 5_000.0;
    }
    println!("  Bob now earns ${:.2}", employees.get(&1002).map_or(0.0, |e| e.salary));
    println!();
}

fn cursors_and_ranges() {
    println!("Example 4: Cursors and Ranges");
    println!("=============================");

    let mut map = OrderedMap::new();
    for key in 1..=10 {
        map.insert(key, key * key);
    }

    print!("  Descending squares:");
    let mut cursor = map.cursor(Direction::Backward);
    while cursor.has_next() {
        print!(" {}", cursor.value().unwrap());
        cursor.advance().unwrap();
    }
    println!();

    println!("  Keys in 3..=6: {}", map.count_range(3..=6));
    println!();
}

fn statistics() {
    println!("Example 5: Statistics");
    println!("=====================");

    let mut map = OrderedMap::new();
    map.set_stats_enabled(true);
    for key in 0..1000 {
        map.insert(key, key);
    }
    for key in (0..1000).step_by(3) {
        map.get(&key);
    }

    let stats = map.stats();
    println!("  Inserts: {}", stats.insert_count);
    println!("  Searches: {}", stats.search_count);
    println!("  Average insert time: {:.9}s", stats.avg_insert_time);
    println!("  Height: {} (max observed {})", stats.current_height, stats.max_height);
}

fn main() {
    basic_operations();
    string_keys();
    struct_payloads();
    cursors_and_ranges();
    statistics();
}
