//! Walks a pointer through every sanctioned conversion, host-side only.
//!
//! Nothing here dereferences: the point of the exercise is that the host can
//! pass device addresses around freely while the memory behind them stays
//! out of reach.

use yonder::{get, DeviceConstPtr, DevicePtr, OpaqueDevicePtr};

fn main() {
    let mut buffer = [0i32; 8];
    let base = DevicePtr::from_raw(buffer.as_mut_ptr());
    println!("base       = {base:?}");

    // Arithmetic and ordering work everywhere.
    let third = base + 2;
    println!("base + 2   = {third:?}  (element diff {})", third - base);
    assert!(base < third);

    // Widening to const and flattening to opaque are implicit.
    let frozen: DeviceConstPtr<i32> = base.into();
    let untyped: OpaqueDevicePtr = base.into();
    println!("const form = {frozen:?}");
    println!("opaque     = {untyped:?}");

    // Reasserting a type is explicit, and round-trips exactly.
    let back = untyped.cast::<i32>();
    assert_eq!(get(back), get(base));
    println!("cast back  = {back:?}");

    // Address iteration is host-safe.
    for p in base.iter(4) {
        println!("  element address {:p}", get(p));
    }
}
