//! # 结果报告层
//!
//! [`Reporter`] 自持全部状态（记录列表加失败标志），
//! 没有任何全局可变量；检查函数之间由此解耦。

/// 一条已求值的检查实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRecord {
    /// 检查类别名；同一标签会出现在多条实例上
    pub label: &'static str,
    pub passed: bool,
}

/// 检查结果的累加器
#[derive(Debug, Default)]
pub struct Reporter {
    records: Vec<CheckRecord>,
    any_failed: bool,
}

impl Reporter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条检查实例并打印对应的通过/失败行
    pub fn report(&mut self, label: &'static str, passed: bool) {
        if passed {
            println!("[PASS] {label}");
        } else {
            println!("[FAIL] {label}");
            self.any_failed = true;
        }
        self.records.push(CheckRecord { label, passed });
    }

    /// 至今是否有任何一条失败
    #[inline]
    pub fn any_failed(&self) -> bool {
        self.any_failed
    }

    #[inline]
    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    /// 打印最终汇总行并返回进程退出码
    pub fn summary(&self) -> i32 {
        if self.any_failed {
            println!("\nSome checks failed.");
            1
        } else {
            println!("\nAll checks passed successfully.");
            0
        }
    }
}
