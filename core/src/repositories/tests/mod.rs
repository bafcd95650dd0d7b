
mod cart_tests;
mod order_tests;
mod payment_tests;
