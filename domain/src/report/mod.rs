//! Statistics and export values

pub mod value_objects;

pub use value_objects::{
    DataDump, DumpEdit, DumpGroup, DumpScope, DumpUser, EditGroupStat, StatisticsReport,
    UserContributionStat,
};
