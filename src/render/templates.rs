// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Markdown document templates.
//!
//! Section headers, table rows and rules must stay byte-identical: section
//! upserts match against them in documents generated from these templates.

/// Built-in document templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocTemplate {
    /// Project changelog (`CHANGELOG.md`).
    Changelog,
    /// API changelog (`API_CHANGELOG.md`).
    ApiChangelog,
    /// API reference (`API.md`).
    ApiDoc,
    /// Requirement document (`REQ-<name>.md`).
    Requirement,
}

impl DocTemplate {
    /// Get the template name.
    pub fn name(&self) -> &'static str {
        match self {
            DocTemplate::Changelog => "changelog",
            DocTemplate::ApiChangelog => "api-changelog",
            DocTemplate::ApiDoc => "api-doc",
            DocTemplate::Requirement => "requirement",
        }
    }

    /// Get the template source.
    pub fn source(&self) -> &'static str {
        match self {
            DocTemplate::Changelog => CHANGELOG_TEMPLATE,
            DocTemplate::ApiChangelog => API_CHANGELOG_TEMPLATE,
            DocTemplate::ApiDoc => API_DOC_TEMPLATE,
            DocTemplate::Requirement => REQUIREMENT_TEMPLATE,
        }
    }

    /// Get all templates.
    pub fn all() -> &'static [DocTemplate] {
        &[
            DocTemplate::Changelog,
            DocTemplate::ApiChangelog,
            DocTemplate::ApiDoc,
            DocTemplate::Requirement,
        ]
    }
}

/// Placeholder line of an empty section.
pub const EMPTY_SECTION: &str = "无";

const CHANGELOG_TEMPLATE: &str = r#"# Changelog

本文件记录项目的所有重要变更。

格式基于 [Keep a Changelog](https://keepachangelog.com/zh-CN/1.0.0/)，
版本号遵循 [语义化版本](https://semver.org/lang/zh-CN/)。

## [Unreleased]

### Added
- 无

### Changed
- 无

### Fixed
- 无

### Removed
- 无

---

[Unreleased]: {{repo_url}}/compare/v1.0.0...HEAD
"#;

const API_CHANGELOG_TEMPLATE: &str = r#"# API Changelog

本文件记录 API 接口的所有变更。

## [Unreleased]

### 新增接口
- 无

### 接口变更
- 无

### 废弃接口
- 无

### 移除接口
- 无

---
"#;

const API_DOC_TEMPLATE: &str = r#"# {{project_name}} API 接口文档

## 文档信息

| 属性 | 值 |
|------|-----|
| 版本 | v1.0.0 |
| 最后更新 | {{date}} |
| 基础URL | `{{base_url}}` |

---

## 1. 概述

### 1.1 简介

{{description}}

### 1.2 基础信息

- **协议**: HTTP/HTTPS
- **数据格式**: JSON
- **字符编码**: UTF-8

---

## 2. 认证方式

### 2.1 认证类型

{{auth_type}}

### 2.2 认证方式

```
Authorization: Bearer {token}
```

---

## 3. 接口列表

{{endpoints}}

---

## 4. 数据模型

{{models}}

---

## 5. 错误码说明

| 错误码 | HTTP状态码 | 描述 | 解决方案 |
|--------|------------|------|----------|
| - | 200 | 成功 | - |
| - | 400 | 请求参数错误 | 检查请求参数格式 |
| - | 401 | 未授权 | 检查Token是否有效 |
| - | 403 | 禁止访问 | 检查用户权限 |
| - | 404 | 资源不存在 | 检查请求路径 |
| - | 500 | 服务器内部错误 | 联系管理员 |

---

## 附录

### A. 相关文档

- [架构文档](../architecture.md)
- [API变更日志](./API_CHANGELOG.md)
"#;

const REQUIREMENT_TEMPLATE: &str = r#"# {{title}} - 需求文档

## 文档信息

| 属性 | 值 |
|------|-----|
| 文档编号 | REQ-{{number}} |
| 版本 | v1.0 |
| 创建日期 | {{date}} |
| 最后更新 | {{date}} |
| 作者 | {{author}} |
| 状态 | 草稿 |

---

## 1. 功能概述

### 1.1 简要描述

{{brief_description}}

### 1.2 关键词

{{keywords}}

---

## 2. 背景和目标

### 2.1 背景

{{background}}

### 2.2 目标

- 目标 1：{{goal1}}
- 目标 2：{{goal2}}

### 2.3 非目标

{{non_goals}}

---

## 3. 功能需求

### 3.1 用户故事

| 编号 | 角色 | 需求 | 价值 |
|------|------|------|------|
| US-01 | 作为{{role}} | 我希望{{want}} | 以便{{value}} |

### 3.2 功能清单

| 编号 | 功能名称 | 优先级 | 描述 |
|------|----------|--------|------|
| F-01 | {{feature_name}} | P0 | {{feature_description}} |

### 3.3 业务规则

- BR-01：{{business_rule}}

---

## 4. 非功能需求

### 4.1 性能要求

- 响应时间：{{performance}}
- 吞吐量：{{throughput}}

### 4.2 安全要求

- {{security}}

### 4.3 兼容性

- {{compatibility}}

---

## 5. UI/交互设计

### 5.1 页面布局

{{ui_layout}}

### 5.2 交互流程

{{interaction_flow}}

### 5.3 状态说明

| 状态 | 显示效果 | 触发条件 |
|------|----------|----------|
| {{state}} | {{display}} | {{trigger}} |

---

## 6. 数据模型

### 6.1 数据表

{{data_tables}}

### 6.2 数据字段说明

| 字段名 | 类型 | 必填 | 描述 |
|--------|------|------|------|
| {{field}} | {{type}} | 是/否 | {{field_description}} |

---

## 7. 验收标准

### 7.1 功能验收

- [ ] AC-01：{{acceptance_criteria}}

### 7.2 测试用例

| 用例编号 | 描述 | 预期结果 |
|----------|------|----------|
| TC-01 | {{test_case}} | {{expected_result}} |

---

## 8. 时间节点

| 里程碑 | 计划日期 | 实际日期 | 状态 |
|--------|----------|----------|------|
| 需求评审 | {{date}} | - | 待开始 |
| 开发完成 | {{date}} | - | 待开始 |
| 测试完成 | {{date}} | - | 待开始 |
| 上线发布 | {{date}} | - | 待开始 |

---

## 附录

### A. 相关文档

- [API 文档](../api/API.md)
- [架构文档](../architecture.md)

### B. 变更历史

| 版本 | 日期 | 作者 | 变更说明 |
|------|------|------|----------|
| v1.0 | {{date}} | {{author}} | 初始版本 |
"#;
