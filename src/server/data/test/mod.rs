mod lecture;
