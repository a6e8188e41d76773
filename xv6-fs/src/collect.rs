//! # 地址收集层
//!
//! 单趟遍历 inode 表，收齐一致性检查所需的一切：
//! 活跃 inode 引用到的全部直接与间接块编号、
//! 各 inode 被目录项引用的次数，以及哪些 inode 在结构上“在用”。

use crate::image::{FsImage, DIRENTS_PER_BLOCK};
use crate::layout::bitmap;
use crate::NINODES;

/// 收集趟产出的工作集
pub struct Collected {
    /// 活跃 inode 的全部非零直接槽值；允许重复
    pub direct_addrs: Vec<u32>,
    /// 全部非零间接槽值，加上从合法间接块内读出的非零表项；允许重复
    pub indirect_addrs: Vec<u32>,
    /// 各 inode 被目录项引用的次数（“.”与“..”不计）
    pub inode_refs: Vec<u32>,
    /// 每个 inode 一位：类型非空闲时置位
    pub used_inodes: Vec<u8>,
}

/// 遍历全部 inode 一次，产出工作集
pub fn collect(image: &FsImage) -> Collected {
    let mut direct_addrs = Vec::new();
    let mut indirect_addrs = Vec::new();
    let mut inode_refs = vec![0_u32; NINODES];
    let mut used_inodes = vec![0_u8; NINODES.div_ceil(8)];

    // 根目录经由自身的“.”项引用自己，该自引用使其无需父目录项即成锚点
    inode_refs[1] += 1;

    for i in 0..NINODES {
        let inode = image.inode(i);
        if inode.is_free() {
            continue;
        }

        if inode.is_dir() {
            // 第0、1项是结构性的自身/父链接，不算新引用
            for j in 2..DIRENTS_PER_BLOCK {
                let Some(entry) = image.dir_entry(&inode, j) else {
                    break;
                };
                let inum = entry.inum as usize;
                if inum != 0 && inum < NINODES {
                    inode_refs[inum] += 1;
                }
            }
        }

        bitmap::set_bit(&mut used_inodes, i, true);

        for &addr in inode.direct() {
            if addr != 0 {
                direct_addrs.push(addr);
            }
        }

        let indirect = inode.indirect();
        if indirect != 0 {
            indirect_addrs.push(indirect);
            // 编号不合法的间接块不再展开，避免越界读取
            if FsImage::addr_in_bounds(indirect) {
                indirect_addrs.extend(image.indirect_entries(indirect).filter(|&addr| addr != 0));
            }
        }
    }

    log::debug!(
        "collected {} direct / {} indirect addresses",
        direct_addrs.len(),
        indirect_addrs.len()
    );

    Collected {
        direct_addrs,
        indirect_addrs,
        inode_refs,
        used_inodes,
    }
}
