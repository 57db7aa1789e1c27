//! Number-base conversion exercises.
//!
//! Both conversions pack the octal digits of the result into a base-10
//! integer, so `decimal_to_octal(8)` is `10` and `decimal_to_octal(64)`
//! is `100`.

/// Convert a decimal number to its octal digits, packed in base 10.
pub fn decimal_to_octal(decimal: u32) -> u64 {
    let mut remaining = decimal;
    let mut octal = 0u64;
    let mut place = 1u64;
    while remaining != 0 {
        octal += u64::from(remaining % 8) * place;
        remaining /= 8;
        place *= 10;
    }
    octal
}

/// Convert a binary number, written out as base-10 digits, to packed octal.
///
/// Each base-10 digit of the argument is read as one bit, least
/// significant first, so `binary_to_octal(110111)` is `67`. Digits other
/// than 0 and 1 are not rejected; they contribute their value times the
/// corresponding power of two.
pub fn binary_to_octal(binary: u64) -> u64 {
    let mut remaining = binary;
    let mut decimal = 0u32;
    let mut bit = 0u32;
    while remaining != 0 {
        decimal += (remaining % 10) as u32 * (1u32 << bit);
        bit += 1;
        remaining /= 10;
    }
    decimal_to_octal(decimal)
}
