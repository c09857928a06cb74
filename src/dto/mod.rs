pub mod subscriber_dto;
pub mod vacancy_dto;
