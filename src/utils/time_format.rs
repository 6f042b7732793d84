use chrono::{DateTime, Local};

/// 格式化时间为报告中的显示格式
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
