/* xv6-fs 检查器的整体架构，自下而上 */

// 磁盘数据结构层：表示磁盘文件系统的定长记录
mod layout;
pub use layout::bitmap;
pub use layout::{DirEntry, DiskInode, InodeKind};

// 镜像访问层：持有镜像字节，暴露带边界检查的类型化视图
mod image;
pub use image::{FsImage, DIRENTS_PER_BLOCK, INDIRECT_COUNT};

// 地址收集层：单趟遍历全部 inode，产出检查所需的工作集
mod collect;
pub use collect::{collect, Collected};

// 一致性检查层：按固定顺序执行的检查组
mod check;
pub use check::run_checks;

// 结果报告层：逐项记录检查结果并给出最终状态
mod report;
pub use report::{CheckRecord, Reporter};

/// 块大小（字节）
pub const BLOCK_SIZE: usize = 512;
/// 镜像中 inode 表的表项数
pub const NINODES: usize = 200;
/// 每个 inode 的直接索引槽数
pub const NDIRECT: usize = 12;
/// inode 表每块容纳的 inode 数
pub const INODES_PER_BLOCK: usize = BLOCK_SIZE / DiskInode::SIZE;
/// inode 表的起始块；块0（引导）与块1（超级块）在其之前，检查器不读取
pub const INODE_START: usize = 2;
/// 空闲块位图所在的块，紧随 inode 表
pub const BITMAP_START: usize = INODE_START + NINODES / INODES_PER_BLOCK;
/// 数据区域的起始块
pub const DATA_START: u32 = BITMAP_START as u32 + 1;
/// 镜像总块数
pub const FS_SIZE: u32 = 1000;
