mod income_form;

pub use income_form::IncomeFormModel;
