// Example: raw window math over a million fixed-size rows.
use windowlist::{Align, SizeModel, compute_window, scroll_offset_for};

fn main() {
    let mut model = SizeModel::new(1_000_000, 24).expect("estimate > 0");

    let viewport = 600;
    let w = compute_window(&mut model, 123_456, viewport, 4);
    println!("total_size={}", model.total_size());
    println!("window={w:?} ({} rows)", w.len());

    let target = scroll_offset_for(&mut model, 999_999, Align::End, viewport, 123_456);
    let w = compute_window(&mut model, target, viewport, 4);
    println!("after scroll_to end: offset={target} window={w:?}");
}
