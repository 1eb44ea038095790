mod course;
