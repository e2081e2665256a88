// Built-in inputs used when no --job / --resume file is given.

pub const SAMPLE_JOB_DESCRIPTION: &str = r#"
Senior Software Engineer - Python

Our backend team is hiring an experienced Python developer.

Requirements:
- 5+ years of professional software development
- Strong Python and Django skills
- Hands-on AWS experience (S3, Lambda, EC2)
- RESTful API design
- SQL and NoSQL databases
- Docker and Kubernetes
- Degree in Computer Science or a related field
"#;

pub const SAMPLE_RESUME: &str = r#"
Alex Morgan
Software Engineer

EXPERIENCE
Senior Software Engineer, Northwind Commerce (2019 - present)
- Built Python/Django services for an e-commerce platform
- Designed REST APIs handling over a million requests per day
- Moved batch jobs to AWS Lambda
- Ran PostgreSQL and MongoDB in production
- Shipped services with Docker and Kubernetes

Software Engineer, Brightpath Labs (2016 - 2019)
- Built Flask web applications
- Worked with S3 and EC2
- Set up CI/CD pipelines

EDUCATION
B.S. Computer Science (2016)

SKILLS
Python, Django, Flask, AWS, Docker, Kubernetes, PostgreSQL, MongoDB, REST
"#;
