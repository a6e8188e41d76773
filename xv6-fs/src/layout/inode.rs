use super::{read_u16, read_u32};
use crate::NDIRECT;

/// 磁盘上的 inode，定长 64 字节：
/// 类型、设备号、硬链接数、文件大小，以及 12 个直接索引槽
/// 加 1 个一级间接索引槽。槽值为 0 表示未使用。
#[derive(Debug, Clone)]
pub struct DiskInode {
    kind_raw: u16,
    pub major: u16,
    pub minor: u16,
    /// 硬链接个数
    pub nlink: u16,
    pub size: u32,
    pub addrs: [u32; NDIRECT + 1],
}

/// inode 类型的合法编码
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InodeKind {
    #[default]
    Free,
    Directory,
    File,
    Device,
}

impl InodeKind {
    /// 从磁盘编码解析类型；编码不在集合内则返回空
    pub fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            0 => Some(Self::Free),
            1 => Some(Self::Directory),
            2 => Some(Self::File),
            3 => Some(Self::Device),
            _ => None,
        }
    }
}

impl DiskInode {
    /// inode 的磁盘大小恒为64字节
    pub const SIZE: usize = 64;

    /// 从磁盘字节解码一个 inode（小端序字段）
    pub fn decode(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= Self::SIZE);

        let mut addrs = [0; NDIRECT + 1];
        for (j, addr) in addrs.iter_mut().enumerate() {
            *addr = read_u32(bytes, 12 + j * 4);
        }

        Self {
            kind_raw: read_u16(bytes, 0),
            major: read_u16(bytes, 2),
            minor: read_u16(bytes, 4),
            nlink: read_u16(bytes, 6),
            size: read_u32(bytes, 8),
            addrs,
        }
    }

    /// 解码后的类型；磁盘编码非法时为空
    #[inline]
    pub fn kind(&self) -> Option<InodeKind> {
        InodeKind::from_raw(self.kind_raw)
    }

    /// 是否为空闲 inode。注意：非法类型编码不算空闲
    #[inline]
    pub fn is_free(&self) -> bool {
        self.kind_raw == 0
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind() == Some(InodeKind::Directory)
    }

    /// 12 个直接索引槽
    #[inline]
    pub fn direct(&self) -> &[u32] {
        &self.addrs[..NDIRECT]
    }

    /// 一级间接索引槽，位于索引列表末位
    #[inline]
    pub fn indirect(&self) -> u32 {
        self.addrs[NDIRECT]
    }
}
