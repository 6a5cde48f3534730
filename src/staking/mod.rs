//! Staking rewards: positions, CSV loading, pro-rata accrual timelines

mod position;
mod accrual;

pub use position::{StakePosition, load_positions, DEFAULT_APY_PCT};
pub use accrual::{
    accrued_reward, reward_timeline, RewardPoint, RewardTimeline, RewardWindow,
    SECONDS_PER_YEAR,
};
