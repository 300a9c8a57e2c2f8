// This file is an example of how to use the `allium_vision` library.
// The main library entry point is `src/lib.rs`.

use allium_vision::{AnalysisPipeline, PixelBuffer, FRAME_HEIGHT, FRAME_WIDTH};

fn main() {
    println!("Allium Vision Engine - Example Runner");

    // In a real application the frame would come from a camera capture or a
    // decoded upload, resized to 224x224 by the caller. Here we synthesize a
    // uniform golden-skinned frame.
    let mut bytes = Vec::with_capacity((FRAME_WIDTH * FRAME_HEIGHT * 4) as usize);
    for _ in 0..FRAME_WIDTH * FRAME_HEIGHT {
        bytes.extend_from_slice(&[150, 120, 60, 255]);
    }
    let buffer = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT, bytes)
        .expect("synthesized buffer matches its declared dimensions");

    let pipeline = AnalysisPipeline::default();
    match pipeline.analyze(&buffer) {
        Ok(record) => {
            let score = allium_vision::shelf_life::estimate(&record);
            println!("Record: {record:#?}");
            println!("Shelf life: {} days, grade {:?}", score.days, score.grade);
        }
        Err(err) => eprintln!("Analysis failed: {err}"),
    }
}
