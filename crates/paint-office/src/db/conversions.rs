//! Mapping between SeaORM rows and the record types the services hand out.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::ActiveValue;

use super::entities::{
    company, contractor, invoice, job_description, my_company_info, property, supervisor,
};
use crate::records::domain::{
    Company, Contractor, Invoice, InvoiceStatus, JobDescription, MyCompanyInfo, Property,
    Supervisor,
};

/// Identity 0 means "let the database assign one".
fn identity(id: i32) -> ActiveValue<i32> {
    if id == 0 {
        NotSet
    } else {
        Set(id)
    }
}

impl From<company::Model> for Company {
    fn from(model: company::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            owner: model.owner,
            phone: model.phone,
            email: model.email,
            address: model.address,
            city: model.city,
            zip: model.zip,
            special_note: model.special_note,
            supervisors: Vec::new(),
        }
    }
}

pub(crate) fn company_active_model(company: &Company) -> company::ActiveModel {
    company::ActiveModel {
        id: identity(company.id),
        name: Set(company.name.clone()),
        owner: Set(company.owner.clone()),
        phone: Set(company.phone.clone()),
        email: Set(company.email.clone()),
        address: Set(company.address.clone()),
        city: Set(company.city.clone()),
        zip: Set(company.zip.clone()),
        special_note: Set(company.special_note.clone()),
    }
}

impl From<supervisor::Model> for Supervisor {
    fn from(model: supervisor::Model) -> Self {
        Self {
            id: model.id,
            company_id: model.company_id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            company_name: None,
            properties: Vec::new(),
        }
    }
}

pub(crate) fn supervisor_active_model(supervisor: &Supervisor) -> supervisor::ActiveModel {
    supervisor::ActiveModel {
        id: identity(supervisor.id),
        company_id: Set(supervisor.company_id),
        name: Set(supervisor.name.clone()),
        phone: Set(supervisor.phone.clone()),
        email: Set(supervisor.email.clone()),
    }
}

impl From<property::Model> for Property {
    fn from(model: property::Model) -> Self {
        Self {
            id: model.id,
            supervisor_id: model.supervisor_id,
            name: model.name,
            address: model.address,
            city: model.city,
            zip: model.zip,
            gate_code: model.gate_code,
            lock_box: model.lock_box,
            garage_remote_code: model.garage_remote_code,
            manager_name: model.manager_name,
            manager_phone: model.manager_phone,
            manager_email: model.manager_email,
            special_note: model.special_note,
            is_active: model.is_active,
        }
    }
}

pub(crate) fn property_active_model(property: &Property) -> property::ActiveModel {
    property::ActiveModel {
        id: identity(property.id),
        supervisor_id: Set(property.supervisor_id),
        name: Set(property.name.clone()),
        address: Set(property.address.clone()),
        city: Set(property.city.clone()),
        zip: Set(property.zip.clone()),
        gate_code: Set(property.gate_code.clone()),
        lock_box: Set(property.lock_box.clone()),
        garage_remote_code: Set(property.garage_remote_code.clone()),
        manager_name: Set(property.manager_name.clone()),
        manager_phone: Set(property.manager_phone.clone()),
        manager_email: Set(property.manager_email.clone()),
        special_note: Set(property.special_note.clone()),
        is_active: Set(property.is_active),
    }
}

impl From<contractor::Model> for Contractor {
    fn from(model: contractor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            license_number: model.license_number,
            social_security_number: model.social_security_number,
            contractor_number: model.contractor_number,
            payroll_percent: model.payroll_percent,
            cell_phone: model.cell_phone,
            email: model.email,
            address: model.address,
            city: model.city,
            zip: model.zip,
            special_note: model.special_note,
            is_active: model.is_active,
        }
    }
}

pub(crate) fn contractor_active_model(contractor: &Contractor) -> contractor::ActiveModel {
    contractor::ActiveModel {
        id: identity(contractor.id),
        name: Set(contractor.name.clone()),
        license_number: Set(contractor.license_number.clone()),
        social_security_number: Set(contractor.social_security_number.clone()),
        contractor_number: Set(contractor.contractor_number.clone()),
        payroll_percent: Set(contractor.payroll_percent.clone()),
        cell_phone: Set(contractor.cell_phone.clone()),
        email: Set(contractor.email.clone()),
        address: Set(contractor.address.clone()),
        city: Set(contractor.city.clone()),
        zip: Set(contractor.zip.clone()),
        special_note: Set(contractor.special_note.clone()),
        is_active: Set(contractor.is_active),
    }
}

impl From<job_description::Model> for JobDescription {
    fn from(model: job_description::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            size_bedroom: model.size_bedroom,
            size_bathroom: model.size_bathroom,
            price: model.price,
        }
    }
}

/// Rows are always re-inserted by a replace, so the incoming id is dropped.
pub(crate) fn job_description_active_model(job: &JobDescription) -> job_description::ActiveModel {
    job_description::ActiveModel {
        id: NotSet,
        description: Set(job.description.clone()),
        size_bedroom: Set(job.size_bedroom),
        size_bathroom: Set(job.size_bathroom),
        price: Set(job.price),
    }
}

impl From<my_company_info::Model> for MyCompanyInfo {
    fn from(model: my_company_info::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            address: model.address,
            zip: model.zip,
            license_number: model.license_number,
        }
    }
}

pub(crate) fn my_company_info_active_model(
    id: ActiveValue<i32>,
    info: &MyCompanyInfo,
) -> my_company_info::ActiveModel {
    my_company_info::ActiveModel {
        id,
        name: Set(info.name.clone()),
        phone: Set(info.phone.clone()),
        email: Set(info.email.clone()),
        address: Set(info.address.clone()),
        zip: Set(info.zip.clone()),
        license_number: Set(info.license_number.clone()),
    }
}

impl From<invoice::Model> for Invoice {
    fn from(model: invoice::Model) -> Self {
        Self {
            id: model.id,
            work_order: model.work_order,
            job_description_choice: model.job_description_choice,
            contractor_name: model.contractor_name,
            company_name: model.company_name,
            property_address: model.property_address,
            unit: model.unit,
            amount_cost: model.amount_cost,
            first_payment: model.first_payment,
            first_check_number: model.first_check_number,
            first_paid_on: model.first_paid_on,
            second_payment: model.second_payment,
            second_check_number: model.second_check_number,
            second_paid_on: model.second_paid_on,
            todays_date: model.todays_date,
            work_date: model.work_date,
            created_date: model.created_date,
            special_note: model.special_note,
            gate_code: model.gate_code,
            lock_box: model.lock_box,
            garage_remote_code: model.garage_remote_code,
            size_bedroom: model.size_bedroom,
            size_bathroom: model.size_bathroom,
            status: InvoiceStatus::from_code(model.status),
        }
    }
}

pub(crate) fn invoice_active_model(
    id: ActiveValue<i32>,
    invoice: &Invoice,
) -> invoice::ActiveModel {
    invoice::ActiveModel {
        id,
        work_order: Set(invoice.work_order.clone()),
        job_description_choice: Set(invoice.job_description_choice.clone()),
        contractor_name: Set(invoice.contractor_name.clone()),
        company_name: Set(invoice.company_name.clone()),
        property_address: Set(invoice.property_address.clone()),
        unit: Set(invoice.unit.clone()),
        amount_cost: Set(invoice.amount_cost),
        first_payment: Set(invoice.first_payment),
        first_check_number: Set(invoice.first_check_number.clone()),
        first_paid_on: Set(invoice.first_paid_on),
        second_payment: Set(invoice.second_payment),
        second_check_number: Set(invoice.second_check_number.clone()),
        second_paid_on: Set(invoice.second_paid_on),
        todays_date: Set(invoice.todays_date),
        work_date: Set(invoice.work_date),
        created_date: Set(invoice.created_date),
        special_note: Set(invoice.special_note.clone()),
        gate_code: Set(invoice.gate_code.clone()),
        lock_box: Set(invoice.lock_box.clone()),
        garage_remote_code: Set(invoice.garage_remote_code.clone()),
        size_bedroom: Set(invoice.size_bedroom),
        size_bathroom: Set(invoice.size_bathroom),
        status: Set(invoice.status.code()),
    }
}
