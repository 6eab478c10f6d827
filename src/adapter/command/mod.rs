mod abort_conversion_handler;
mod begin_conversion_handler;
mod deposit_handler;
mod pay_loan_handler;
mod request_loan_handler;
mod withdraw_handler;
