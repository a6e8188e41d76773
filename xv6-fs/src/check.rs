//! # 一致性检查层
//!
//! 固定顺序的结构性检查组。每个检查实例独立上报，
//! 任何一项失败都不影响其余项继续执行，一趟报完镜像的全部问题。

use crate::collect::collect;
use crate::image::FsImage;
use crate::layout::{bitmap, InodeKind};
use crate::report::Reporter;
use crate::{FS_SIZE, NINODES};

/// 对 `image` 执行全部检查，每个适用实体各记一条结果
pub fn run_checks(image: &FsImage, reporter: &mut Reporter) {
    // 1. 类型合法性
    for i in 0..NINODES {
        reporter.report("Inode type check", image.inode(i).kind().is_some());
    }

    let collected = collect(image);

    // 2/3. 地址边界
    for &addr in &collected.direct_addrs {
        reporter.report("Direct address bounds check", FsImage::addr_in_bounds(addr));
    }
    for &addr in &collected.indirect_addrs {
        reporter.report("Indirect address bounds check", FsImage::addr_in_bounds(addr));
    }

    // 4. 根目录形态
    reporter.report("Root directory type", root_is_well_formed(image));

    // 5. 目录项形态
    for i in 0..NINODES {
        if image.inode(i).is_dir() {
            reporter.report("Directory format check", dir_is_well_formed(image, i));
        }
    }

    // 6. 位图须覆盖全部收集到的地址
    let disk_bitmap = image.bitmap();
    for &addr in &collected.direct_addrs {
        reporter.report("Bitmap direct use match", addr_bit_is_set(disk_bitmap, addr));
    }
    for &addr in &collected.indirect_addrs {
        reporter.report("Bitmap indirect use match", addr_bit_is_set(disk_bitmap, addr));
    }

    // 7. 位图不得有多余的在用位：
    // 清掉全部收集地址对应的位后，余下必须全零
    let mut residual = disk_bitmap.to_vec();
    for &addr in collected
        .direct_addrs
        .iter()
        .chain(&collected.indirect_addrs)
    {
        if addr < FS_SIZE {
            bitmap::set_bit(&mut residual, addr as usize, false);
        }
    }
    for &byte in &residual {
        reporter.report("Bitmap unused block check", byte == 0);
    }

    // 8. 在用与被引用的双向一致性
    for i in 0..NINODES {
        let used = bitmap::get_bit(&collected.used_inodes, i);
        let referenced = collected.inode_refs[i] > 0;
        reporter.report("Inode used but not found", !(used && !referenced));
        reporter.report("Inode referenced but marked free", !(!used && referenced));
    }

    // 9. 普通文件的链接数须等于引用数
    for i in 0..NINODES {
        let inode = image.inode(i);
        if inode.kind() == Some(InodeKind::File) {
            reporter.report(
                "File ref count",
                u32::from(inode.nlink) == collected.inode_refs[i],
            );
        }
    }

    // 10. 目录至多被引用一次
    for i in 0..NINODES {
        let inode = image.inode(i);
        if inode.is_dir() {
            reporter.report(
                "Directory appears once",
                inode.nlink <= 1 && collected.inode_refs[i] <= 1,
            );
        }
    }
}

/// 编号超出镜像的地址不可能有对应位，直接判失败
#[inline]
fn addr_bit_is_set(disk_bitmap: &[u8], addr: u32) -> bool {
    addr < FS_SIZE && bitmap::get_bit(disk_bitmap, addr as usize)
}

/// inode 1 必须是目录，且第0、1项均引用 inode 1
fn root_is_well_formed(image: &FsImage) -> bool {
    let root = image.inode(1);
    if !root.is_dir() {
        return false;
    }
    match (image.dir_entry(&root, 0), image.dir_entry(&root, 1)) {
        (Some(dot), Some(dotdot)) => dot.inum == 1 && dotdot.inum == 1,
        _ => false,
    }
}

/// 目录的第0项须为 `(自身, ".")`，第1项须名为 ".."。
/// 父项的 inum 无法脱离全树遍历独立验证，此处不约束
fn dir_is_well_formed(image: &FsImage, inum: usize) -> bool {
    let dir = image.inode(inum);
    match (image.dir_entry(&dir, 0), image.dir_entry(&dir, 1)) {
        (Some(dot), Some(dotdot)) => {
            dot.inum as usize == inum && dot.name() == "." && dotdot.name() == ".."
        }
        _ => false,
    }
}
