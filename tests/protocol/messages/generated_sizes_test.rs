use core::mem::size_of;

use umb_codec::core::{UmbBytes, UmbString, MAX_DYNAMIC_SIZE};
use umb_codec::protocol::messages::{GetSomeStuff, SensorSample};

// This test ensures the hand-written demo messages and the fixed-capacity
// dynamic-field buffers stay within the bounds expected for an embedded
// target: no heap allocation, and no field silently growing unbounded.
#[test]
fn message_structs_memory_footprint_is_stable() {
    println!("\n╔══════════════════════════════════════════════════════════════════════╗");
    println!("║               MEMORY FOOTPRINT OF MESSAGE STRUCTURES                ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let get_some_stuff_size = size_of::<GetSomeStuff>();
    let sensor_sample_size = size_of::<SensorSample>();
    let bytes_size = size_of::<UmbBytes>();
    let string_size = size_of::<UmbString>();

    println!("MESSAGE STRUCTS:");
    println!("─────────────────────────────────────────────────────────────────────");
    println!("  GetSomeStuff (no fields)       : {:4} B", get_some_stuff_size);
    println!("  SensorSample (9 fields)        : {:4} B", sensor_sample_size);
    println!("─────────────────────────────────────────────────────────────────────\n");

    assert_eq!(
        get_some_stuff_size, 0,
        "a message with no fields must be a zero-sized type, not {get_some_stuff_size} B"
    );

    // Two bools/byte/int fields plus a float plus the two fixed-capacity
    // dynamic buffers dominate this struct's size; bound it loosely against
    // the two buffers it owns rather than pin an exact number that would
    // drift with unrelated field reordering.
    assert!(
        sensor_sample_size >= bytes_size + string_size,
        "SensorSample ({sensor_sample_size} B) must be at least as large as its \
         UmbBytes + UmbString payload ({} B)",
        bytes_size + string_size
    );
    assert!(
        sensor_sample_size <= bytes_size + string_size + 64,
        "SensorSample ({sensor_sample_size} B) carries more overhead than expected \
         on top of its two dynamic buffers"
    );

    println!("FIXED-CAPACITY DYNAMIC BUFFERS (no_std, no heap):");
    println!("─────────────────────────────────────────────────────────────────────");
    println!(
        "  UmbBytes (capacity {:3})         : {:4} B",
        MAX_DYNAMIC_SIZE, bytes_size
    );
    println!(
        "  UmbString (capacity {:3})        : {:4} B",
        MAX_DYNAMIC_SIZE, string_size
    );
    println!("─────────────────────────────────────────────────────────────────────\n");

    // UmbBytes stores one byte per code unit; UmbString stores two. Both
    // carry a `len: usize` discriminant alongside the fixed backing array.
    assert!(
        bytes_size >= MAX_DYNAMIC_SIZE,
        "UmbBytes ({bytes_size} B) must hold at least {MAX_DYNAMIC_SIZE} payload bytes"
    );
    assert!(
        string_size >= MAX_DYNAMIC_SIZE * 2,
        "UmbString ({string_size} B) must hold at least {MAX_DYNAMIC_SIZE} 16-bit code units"
    );

    let total = get_some_stuff_size + sensor_sample_size;
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║  TOTAL (2 demo messages)                 : {:6} bytes              ║", total);
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");
}
