// The binary only points at the demo; the network lives in the library.
// Run the planar "flower" demo with:
//   cargo run --release --example planar
fn main() {
    println!("planar-nn: a one-hidden-layer classifier for 2-D points.");
    println!("Run `cargo run --release --example planar` to train on the flower dataset.");
}
