//! # 磁盘数据结构层
//!
//! 被检查镜像的磁盘布局：
//! 引导块 | 超级块 | inode 表 | 空闲块位图 | 数据区域
//!
//! 多字节整数在磁盘上一律为小端序，解码只在本层发生。

mod inode;
pub use inode::{DiskInode, InodeKind};

/// 目录项，也属于磁盘文件系统数据结构
mod dir_entry;
pub use dir_entry::DirEntry;

pub mod bitmap;

pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
}

pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}
