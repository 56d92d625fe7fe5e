/// RSSI 滑动窗口平滑
///
/// 固定容量的 FIFO 窗口，维护运行总和，add / average 均为
/// 摊还 O(1)。用于原始 RSSI 样本进入估计器之前的平滑，
/// 不属于估计器本身的契约

use std::collections::VecDeque;

/// 滑动窗口平均器
#[derive(Clone, Debug)]
pub struct RollingAverage {
    samples: VecDeque<f64>,
    running_sum: f64,
    capacity: usize,
}

impl RollingAverage {
    /// 创建容量为 capacity 的平均器
    ///
    /// 容量为 0 时窗口恒为空，average 恒为 0
    pub fn new(capacity: usize) -> Self {
        RollingAverage {
            samples: VecDeque::with_capacity(capacity),
            running_sum: 0.0,
            capacity,
        }
    }

    /// 加入一个样本，窗口满时淘汰最旧的样本
    pub fn add(&mut self, value: f64) {
        self.samples.push_back(value);
        self.running_sum += value;

        while self.samples.len() > self.capacity {
            if let Some(oldest) = self.samples.pop_front() {
                self.running_sum -= oldest;
            }
        }
    }

    /// 当前窗口的平均值，窗口为空时返回 0
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.running_sum / self.samples.len() as f64
    }

    /// 当前窗口内的样本数
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// 窗口容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 窗口是否为空
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 清空窗口
    pub fn clear(&mut self) {
        self.samples.clear();
        self.running_sum = 0.0;
    }
}
