use windowlist_controller::{Align, VirtualList, VirtualListOptions, WindowChange};

fn main() {
    // Example: a host frame loop wired to the controller.
    //
    // A real host would:
    // - forward scroll/resize events as they arrive (possibly several per frame)
    // - call on_frame(now_ms) from its render tick
    // - create/destroy row widgets in on_create/on_destroy
    // - position rows from the entries of each published window
    let items: Vec<String> = (0..10_000).map(|i| format!("row #{i}")).collect();

    let opts = VirtualListOptions::new(items.len(), 28)
        .with_overscan(3)
        .with_on_create(Some(|key: &u64| println!("  create row {key}")))
        .with_on_destroy(Some(|key: &u64| println!("  destroy row {key}")))
        .with_on_window_change(Some(move |change: &WindowChange<'_, u64>| {
            println!(
                "  window [{}, {}) top={} total={}",
                change.window.start_index,
                change.window.end_index,
                change.window.top_offset,
                change.total_size
            );
            for (item, entry) in change.iter_with(&items).take(2) {
                println!("    {item} at y={} h={}", entry.offset_from_top, entry.size);
            }
            Ok(())
        }));
    let mut list = VirtualList::new(opts).expect("estimate > 0");

    let mut now_ms = 0u64;
    list.on_viewport_resize(400, now_ms);
    println!("frame t={now_ms}");
    list.on_frame(now_ms);

    // The user drags; events land faster than frames and coalesce.
    for _ in 0..3 {
        for _ in 0..4 {
            now_ms += 4;
            list.on_scroll(list.scroll_offset() + 90, now_ms);
        }
        println!("frame t={now_ms}");
        list.on_frame(now_ms);
    }

    // Rows report their real heights once rendered.
    let window = list.window();
    for index in window.start_index..window.end_index {
        let measured = 24 + (index % 5) as u32 * 8;
        list.measure_item(index, measured).expect("index in range");
    }
    now_ms += 16;
    println!("frame t={now_ms} (after measurement)");
    list.on_frame(now_ms);

    let target = list.scroll_to_index(9_999, Align::End);
    println!("jump to tail: offset={target}");
    list.on_frame(now_ms + 16);
    println!("final window={:?}", list.window());
}
