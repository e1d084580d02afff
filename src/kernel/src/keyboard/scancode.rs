//! Scan code set 1 to ASCII translation.
//!
//! Only key-down codes for the main typing block are mapped. There is no
//! modifier state: shift, control and caps lock all translate to nothing, so
//! letters are always lowercase.

/// Number of entries in the lookup table. Every key-up code is at or above it.
const KEYMAP_LEN: usize = 128;

/// Printable characters of a US keyboard, indexed by key-down scan code.
/// A zero byte marks an unmapped code.
static KEYMAP: [u8; KEYMAP_LEN] = build_keymap();

const fn build_keymap() -> [u8; KEYMAP_LEN] {
    // 0x00 through 0x39, escape included as unmapped.
    const ROWS: &[u8] = b"\0\01234567890-=\x08\tqwertyuiop[]\n\0asdfghjkl;'`\0\\zxcvbnm,./\0*\0 ";

    let mut map = [0; KEYMAP_LEN];
    let mut code = 0;
    while code < ROWS.len() {
        map[code] = ROWS[code];
        code += 1;
    }
    map
}

/// Translates a raw scan code into the ASCII byte it types, if any.
///
/// Total over every `u8`: key releases, modifiers and anything past the end
/// of the table yield `None`.
pub fn translate(scancode: u8) -> Option<u8> {
    KEYMAP
        .get(usize::from(scancode))
        .copied()
        .filter(|&byte| byte != 0)
}
