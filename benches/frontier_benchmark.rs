use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::{BinaryHeap, VecDeque};
use wayfinder::collections::{BoundedStack, Frontier, MaxHeap, RingQueue};

const N: u32 = 1000;

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..N {
                heap.push(black_box(i.wrapping_mul(2_654_435_761)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("max_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = MaxHeap::new();
            for i in 0..N {
                heap.add(black_box(i.wrapping_mul(2_654_435_761))).unwrap();
            }
            while let Ok(x) = heap.remove() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    group.bench_function("std_vec_deque_interleaved", |b| {
        b.iter(|| {
            let mut queue = VecDeque::new();
            for i in 0..N {
                queue.push_back(black_box(i));
                if i % 3 == 0 {
                    black_box(queue.pop_front());
                }
            }
        });
    });

    group.bench_function("ring_queue_interleaved", |b| {
        b.iter(|| {
            let mut queue = RingQueue::new();
            for i in 0..N {
                queue.add(black_box(i)).unwrap();
                if i % 3 == 0 {
                    black_box(queue.remove().ok());
                }
            }
        });
    });

    group.finish();
}

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    group.bench_function("std_vec_push_pop", |b| {
        b.iter(|| {
            let mut stack = Vec::new();
            for i in 0..N {
                stack.push(black_box(i));
            }
            while let Some(x) = stack.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("bounded_stack_push_pop", |b| {
        b.iter(|| {
            let mut stack = BoundedStack::new();
            for i in 0..N {
                stack.add(black_box(i)).unwrap();
            }
            while let Ok(x) = stack.remove() {
                black_box(x);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_heap, bench_queue, bench_stack);
criterion_main!(benches);
