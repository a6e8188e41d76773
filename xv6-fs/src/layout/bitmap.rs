//! 字节切片上的位图操作。
//!
//! 位 `n` 存于字节 `n / 8`，字节内为小端位序（掩码 `1 << (n % 8)`），
//! 即字节0的位0对应块0。

/// 位 `n` 是否为 1
#[inline]
pub fn get_bit(bitmap: &[u8], n: usize) -> bool {
    bitmap[n / 8] & (1 << (n % 8)) != 0
}

/// 把位 `n` 置为 `value`
#[inline]
pub fn set_bit(bitmap: &mut [u8], n: usize, value: bool) {
    if value {
        bitmap[n / 8] |= 1 << (n % 8);
    } else {
        bitmap[n / 8] &= !(1 << (n % 8));
    }
}
