mod catalog;
mod mocks;
