//! Fixture boards shared by the routing tests.

use shared::memory_board::MemoryBoard;
use shared::pad::{ComponentRef, PadDescriptor, PadNumber};
use shared::vec2::IntVec2;

pub fn pad_at(component: &str, number: &str, x_mm: f64, y_mm: f64) -> PadDescriptor {
    PadDescriptor {
        position: IntVec2::from_mm(x_mm, y_mm),
        component_ref: ComponentRef(component.into()),
        pad_number: PadNumber(number.into()),
    }
}

/// A column of two-pad LEDs chained anode to cathode, 2 mm between the
/// facing pads of neighboring parts. Every neighbor pair falls in the
/// default vertical window; pads of one LED never link.
pub fn led_strip_board() -> MemoryBoard {
    let mut board = MemoryBoard::new();
    board.add_net("VLED");
    board.add_net("LED12");
    board.add_net("LED23");
    board.add_net("GND");

    // LED1: pad 1 on VLED at y=0, pad 2 on LED12 at y=1
    board.place_pad("LED1", "1", "VLED", IntVec2::from_mm(10.0, 0.0));
    board.place_pad("LED1", "2", "LED12", IntVec2::from_mm(10.0, 1.0));
    // LED2 sits 2 mm below LED1
    board.place_pad("LED2", "1", "LED12", IntVec2::from_mm(10.0, 3.0));
    board.place_pad("LED2", "2", "LED23", IntVec2::from_mm(10.0, 4.0));
    // LED3 closes the chain to ground
    board.place_pad("LED3", "1", "LED23", IntVec2::from_mm(10.0, 6.0));
    board.place_pad("LED3", "2", "GND", IntVec2::from_mm(10.0, 7.0));
    board
}

/// A wider board mixing window hits and misses: a horizontal resistor
/// pair in range, plus one resistor too far diagonally to qualify.
pub fn mixed_window_board() -> MemoryBoard {
    let mut board = MemoryBoard::new();
    board.add_net("SIG");
    board.add_net("FAR");

    board.place_pad("R1", "2", "SIG", IntVec2::from_mm(20.0, 5.0));
    board.place_pad("R2", "1", "SIG", IntVec2::from_mm(22.0, 5.05));
    board.place_pad("R3", "1", "FAR", IntVec2::from_mm(30.0, 5.0));
    board.place_pad("R4", "1", "FAR", IntVec2::from_mm(32.0, 7.0));
    board
}
