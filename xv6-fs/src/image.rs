//! # 镜像访问层
//!
//! [`FsImage`] 持有整个镜像的字节快照，只读。
//! 其余各层对镜像的访问都经过这里的类型化视图，
//! 偏移计算集中于此，越界的索引视为调用方的编程错误。

use std::mem;

use crate::layout::{DirEntry, DiskInode};
use crate::{BITMAP_START, BLOCK_SIZE, DATA_START, FS_SIZE, INODE_START, NINODES};

/// 目录第一个直接索引块可容纳的目录项数
pub const DIRENTS_PER_BLOCK: usize = BLOCK_SIZE / DirEntry::SIZE;
/// 一个间接索引块可容纳的块编号数
pub const INDIRECT_COUNT: usize = BLOCK_SIZE / mem::size_of::<u32>();

/// 不可变的文件系统镜像快照
pub struct FsImage {
    bytes: Vec<u8>,
}

impl FsImage {
    /// 镜像的最小字节数：恰好容纳 `FS_SIZE` 个块
    pub const MIN_LEN: usize = FS_SIZE as usize * BLOCK_SIZE;

    /// 包装镜像字节。缓冲不足 [`Self::MIN_LEN`] 字节时返回空；
    /// 截断的镜像属于环境错误，不产生检查记录。
    pub fn new(bytes: Vec<u8>) -> Option<Self> {
        (bytes.len() >= Self::MIN_LEN).then_some(Self { bytes })
    }

    /// 解码 inode 表中的第 `n` 项
    pub fn inode(&self, n: usize) -> DiskInode {
        assert!(n < NINODES, "inode index out of range: {n}");
        let offset = INODE_START * BLOCK_SIZE + n * DiskInode::SIZE;
        DiskInode::decode(&self.bytes[offset..offset + DiskInode::SIZE])
    }

    /// 目录 `dir` 第一个直接索引块内的第 `j` 个目录项。
    /// 该块编号超出镜像时返回空，由调用方把这种目录判为不合格，
    /// 而不是在损坏的镜像上崩溃。
    pub fn dir_entry(&self, dir: &DiskInode, j: usize) -> Option<DirEntry> {
        assert!(dir.is_dir(), "dirent requested from a non-directory inode");
        assert!(j < DIRENTS_PER_BLOCK, "dirent index out of range: {j}");

        let block = dir.addrs[0] as usize;
        if block >= FS_SIZE as usize {
            return None;
        }

        let offset = block * BLOCK_SIZE + j * DirEntry::SIZE;
        Some(DirEntry::decode(&self.bytes[offset..offset + DirEntry::SIZE]))
    }

    /// 空闲块位图中受检的字节区间：镜像每块一位
    pub fn bitmap(&self) -> &[u8] {
        let offset = BITMAP_START * BLOCK_SIZE;
        &self.bytes[offset..offset + FS_SIZE as usize / 8]
    }

    /// 间接索引块 `addr` 内的全部块编号。
    /// 调用方须保证 `addr` 非零且通过了 [`Self::addr_in_bounds`]。
    pub fn indirect_entries(&self, addr: u32) -> impl Iterator<Item = u32> + '_ {
        assert!(addr != 0 && Self::addr_in_bounds(addr));

        let offset = addr as usize * BLOCK_SIZE;
        (0..INDIRECT_COUNT).map(move |j| {
            let at = offset + j * mem::size_of::<u32>();
            u32::from_le_bytes(self.bytes[at..at + 4].try_into().unwrap())
        })
    }

    /// 块编号是否允许出现在 inode 中：
    /// 0（“未使用”哨兵）恒为合法，否则必须落在数据区域内
    #[inline]
    pub fn addr_in_bounds(addr: u32) -> bool {
        addr == 0 || (DATA_START..FS_SIZE).contains(&addr)
    }
}
