// Example: estimates upgraded by measurements as rows render.
use windowlist::{SizeModel, compute_window};

fn main() {
    let mut model = SizeModel::new(10_000, 40).expect("estimate > 0");

    let w = compute_window(&mut model, 0, 400, 2);
    println!("estimated window={w:?}");

    // The host measures the rows it just rendered; expanded rows push
    // everything below them down.
    for index in w.start_index..w.end_index {
        let measured = if index % 3 == 0 { 90 } else { 40 };
        model.record_measured(index, measured).expect("in bounds");
    }

    let w = compute_window(&mut model, 0, 400, 2);
    println!("measured window={w:?}");
    println!(
        "offset_of(5)={} total_size={}",
        model.offset_of(5).expect("in bounds"),
        model.total_size()
    );
}
