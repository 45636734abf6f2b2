use ascii_fit::ConsoleSize;
use ascii_fit::planner::plan_scale;

fn main() {
    println!("ASCII Fit - Scale Plan Demo");
    println!("===========================\n");

    let console = ConsoleSize::new(80, 24);
    let test_cases = vec![
        (4, 4, "4x4 (smaller than the console)"),
        (100, 100, "100x100"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (1000, 1000, "1000x1000"),
        (4000, 300, "4000x300 (panorama)"),
    ];

    for (width, height, description) in test_cases {
        println!("Testing: {}", description);

        let plan = plan_scale(width, height, console, false).expect("valid dimensions");
        for (w, h) in &plan.halvings {
            println!("  halve  -> {}x{}", w, h);
        }
        match plan.finish {
            Some((w, h)) => println!("  finish -> {}x{}", w, h),
            None => println!("  ✓ No finishing resize needed"),
        }

        let (out_w, out_h) = plan.output_dimensions(width, height);
        println!("  Output: {}x{}", out_w, out_h);
        println!();
    }

    println!("Images are halved until they are close to {}x{},", console.width, console.height);
    println!("then finished with one aspect-preserving bilinear resize.");
}
