pub mod stage1_annotate;
pub mod stage2_rank;
pub mod stage3_reshape;
