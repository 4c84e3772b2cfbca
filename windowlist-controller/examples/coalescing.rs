use windowlist_controller::{Schedule, VirtualList, VirtualListOptions, WindowChange};

fn main() {
    // Example: debounced recomputes under a wheel-event storm.
    //
    // With DebounceMs(50), a continuous storm costs one recompute per 50ms
    // instead of one per event. Geometry mutations still land on the next
    // frame regardless of the debounce.
    let opts = VirtualListOptions::new(100_000, 20)
        .with_schedule(Schedule::DebounceMs(50))
        .with_on_window_change(Some(|change: &WindowChange<'_, u64>| {
            println!(
                "  publish [{}, {}) top={}",
                change.window.start_index, change.window.end_index, change.window.top_offset
            );
            Ok(())
        }));
    let mut list = VirtualList::new(opts).expect("estimate > 0");
    list.on_viewport_resize(300, 0);
    list.flush();

    // 60 wheel events over 240ms, a frame tick every 16ms.
    let mut now_ms = 0u64;
    let mut events = 0u32;
    let mut offset = 0u64;
    while now_ms < 240 {
        now_ms += 4;
        offset += 35;
        list.on_scroll(offset, now_ms);
        events += 1;
        if now_ms.is_multiple_of(16) {
            println!("frame t={now_ms}");
            list.on_frame(now_ms);
        }
    }
    list.flush();
    println!("{events} scroll events");

    // A measurement bypasses the debounce entirely.
    let first = list.window().start_index;
    list.measure_item(first, 44).expect("index in range");
    now_ms += 16;
    println!("frame t={now_ms} (after measurement)");
    list.on_frame(now_ms);
}
