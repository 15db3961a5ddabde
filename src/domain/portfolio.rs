use crate::domain::model::{Experience, PersonalInfo, PortfolioRecord, Project, Skill};

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PortfolioRecord {
    /// The built-in profile served by every endpoint.
    pub fn builtin() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Your Name".to_string(),
                title: "Cloud DevOps Engineer & Full Stack Developer".to_string(),
                email: "your.email@example.com".to_string(),
                location: "Your City, Country".to_string(),
                bio: "Passionate developer specializing in cloud infrastructure, CI/CD pipelines, \
                      and modern web applications. Expert in AWS, Terraform, and containerized \
                      deployments."
                    .to_string(),
            },
            skills: vec![
                skill("AWS Cloud", 85),
                skill("Terraform", 80),
                skill("Python", 90),
                skill("Docker", 75),
                skill("Jenkins/GitHub Actions", 80),
                skill("JavaScript", 70),
                skill("Flask/FastAPI", 85),
                skill("Linux/DevOps", 80),
            ],
            projects: vec![
                Project {
                    id: 1,
                    name: "Cloud Portfolio Dashboard".to_string(),
                    description: "Fully automated cloud portfolio built with Flask, deployed on \
                                  AWS using Terraform IaC, featuring auto-scaling, load balancing, \
                                  and CI/CD with GitHub Actions."
                        .to_string(),
                    technologies: strings(&[
                        "Python",
                        "Flask",
                        "AWS",
                        "Terraform",
                        "GitHub Actions",
                        "DynamoDB",
                        "Route53",
                    ]),
                    status: "In Progress".to_string(),
                    github_url: "https://github.com/yourusername/portfolio-dashboard".to_string(),
                    live_url: Some("https://portfolio.yourdomain.com".to_string()),
                },
                Project {
                    id: 2,
                    name: "Microservices E-commerce Platform".to_string(),
                    description: "Containerized e-commerce platform with microservices \
                                  architecture, API gateway, and event-driven communication."
                        .to_string(),
                    technologies: strings(&[
                        "Python",
                        "FastAPI",
                        "Docker",
                        "Kubernetes",
                        "PostgreSQL",
                        "Redis",
                    ]),
                    status: "Completed".to_string(),
                    github_url: "https://github.com/yourusername/ecommerce-microservices"
                        .to_string(),
                    live_url: None,
                },
                Project {
                    id: 3,
                    name: "Infrastructure Automation Suite".to_string(),
                    description: "Complete infrastructure automation using Terraform modules, \
                                  Ansible playbooks, and monitoring stack."
                        .to_string(),
                    technologies: strings(&[
                        "Terraform",
                        "Ansible",
                        "Prometheus",
                        "Grafana",
                        "AWS",
                        "Linux",
                    ]),
                    status: "Completed".to_string(),
                    github_url: "https://github.com/yourusername/infra-automation".to_string(),
                    live_url: None,
                },
            ],
            experience: vec![Experience {
                company: "Your Company".to_string(),
                position: "DevOps Engineer".to_string(),
                duration: "2023 - Present".to_string(),
                description: "Led cloud migration initiatives and implemented CI/CD pipelines \
                              for 15+ applications."
                    .to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_shape() {
        let portfolio = PortfolioRecord::builtin();

        assert_eq!(portfolio.skills.len(), 8);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.experience.len(), 1);
        assert!(portfolio.skills.iter().all(|s| s.level <= 100));

        let ids: Vec<u32> = portfolio.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_bio_line_continuations_join_cleanly() {
        let portfolio = PortfolioRecord::builtin();
        assert!(!portfolio.personal_info.bio.contains("  "));
        assert!(portfolio.personal_info.bio.ends_with("containerized deployments."));
    }
}
