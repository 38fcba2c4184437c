use std::cell::Cell;

use rand::Rng;
use ringdeque::{DequeError, Hooks, RingDeque, StackDeque};

fn main() {
    println!("RingDeque Basic Example");
    println!("=======================\n");

    const CAPACITY: usize = 8;
    let mut rng = rand::thread_rng();

    // A heap-backed deque; push_back refuses once all slots are live.
    let mut deque: RingDeque<i32> = RingDeque::with_capacity(CAPACITY);

    println!("Filling a capacity-{} deque from the back:", CAPACITY);
    for _ in 0..CAPACITY + 2 {
        let value = rng.gen_range(0..100);
        match deque.push_back(value) {
            Ok(()) => println!(
                "  push_back({:2}) -> ok ({}/{} slots live)",
                value,
                deque.len(),
                deque.capacity()
            ),
            Err(DequeError::Full { capacity }) => {
                println!("  push_back({:2}) -> rejected, all {} slots live", value, capacity);
            }
            Err(err) => println!("  push_back({:2}) -> {}", value, err),
        }
    }

    // Both ends without removal: copy out or borrow in place.
    println!("\nEnds:");
    println!("  front()      = {:?}", deque.front());
    println!("  back()       = {:?}", deque.back());
    println!("  peek_front() = {:?}", deque.peek_front());
    println!("  peek_back()  = {:?}", deque.peek_back());

    // Jump the queue: evict one from the back, claim the slot before the
    // current first.
    match deque.pop_back() {
        Ok(evicted) => println!("\npop_back() evicted {} to make room", evicted),
        Err(err) => println!("\npop_back() -> {}", err),
    }
    deque.push_front(-1).unwrap();
    println!("push_front(-1) jumped the queue; front() = {:?}", deque.front());

    // Drain from the back until Empty is reported.
    println!("\nDraining from the back:");
    loop {
        match deque.pop_back() {
            Ok(value) => println!("  pop_back() -> {}", value),
            Err(err) => {
                println!("  pop_back() -> {}", err);
                break;
            }
        }
    }

    // clear resets the bookkeeping without touching slot bytes.
    deque.push_back(1).unwrap();
    deque.push_back(2).unwrap();
    println!("\nRefilled with {} elements, then clear():", deque.len());
    deque.clear();
    println!("  len = {}, is_empty = {}", deque.len(), deque.is_empty());

    // Hooks observe every critical section the deque enters.
    let sections = Cell::new(0u32);
    let guard = Hooks::new(|| sections.set(sections.get() + 1), || ());
    let mut guarded = RingDeque::with_guard(4, guard);
    for value in 0..3 {
        guarded.push_back(value).unwrap();
    }
    let _ = guarded.pop_front();
    println!("\nGuarded deque entered {} critical sections", sections.get());

    // The inline variant needs no allocator and builds in const context.
    let mut inline: StackDeque<u8, 4> = StackDeque::new();
    for value in [10, 20, 30] {
        inline.push_back(value).unwrap();
    }
    println!(
        "\nStackDeque<u8, 4> holds {} of {} inline slots; front() = {:?}",
        inline.len(),
        inline.capacity(),
        inline.front()
    );
}
