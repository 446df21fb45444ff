mod income_inputs;
mod tax_bracket;
mod tax_result;
mod tax_rules;

pub use income_inputs::IncomeInputs;
pub use tax_bracket::{BracketSchedule, ScheduleError, TaxBracket};
pub use tax_result::{BracketAllocation, TaxResult};
pub use tax_rules::TaxRules;
