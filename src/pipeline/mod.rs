pub mod dashboard;
pub mod stage1_normalize;
pub mod stage2_filter;
pub mod stage3_sort;
pub mod stage4_aggregate;
pub mod stage5_report;

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/support.rs"]
pub(crate) mod support;
