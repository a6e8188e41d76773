use std::str;

use super::read_u16;

const NAME_LEN: usize = 14;

/// 目录项：inode 编号加定宽、\0 填充的名字。
/// `inum` 为 0 表示空槽。
#[derive(Debug, Default, Clone)]
pub struct DirEntry {
    pub inum: u16,
    name: [u8; NAME_LEN],
}

impl DirEntry {
    /// 目录项大小恒为16字节
    pub const SIZE: usize = 16;

    /// 从磁盘字节解码一个目录项
    pub fn decode(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= Self::SIZE);

        let mut name = [0; NAME_LEN];
        name.copy_from_slice(&bytes[2..Self::SIZE]);

        Self {
            inum: read_u16(bytes, 0),
            name,
        }
    }

    /// 第一个 \0 之前的名字；字节非 UTF-8 时视为空名
    pub fn name(&self) -> &str {
        let len = self
            .name
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(NAME_LEN);
        str::from_utf8(&self.name[..len]).unwrap_or("")
    }
}
