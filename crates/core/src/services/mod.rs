pub mod conversion_service;
